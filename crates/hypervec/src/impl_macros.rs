/// Implements `Display` and `PartialEq` for a vector type by forwarding to the
/// shared implementations in `base`. Equality is implemented against every
/// listed type, so vectors of different types compare by coordinates.
macro_rules! impl_vector_traits {
    (impl for $type:ty; eq [$($other:ty),+ $(,)?]) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::base::fmt_vector(self, f)
            }
        }

        $(
            impl PartialEq<$other> for $type {
                fn eq(&self, other: &$other) -> bool {
                    $crate::base::vectors_eq(self, other)
                }
            }
        )+
    };
}
