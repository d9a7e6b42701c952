//! Impl helpers shared by the component-wise value types

/// Implements `approx::AbsDiffEq` and `approx::RelativeEq` component-wise.
macro_rules! impl_approx_eq {
    ($ty:ident { $($field:ident),+ }) => {
        impl<T> approx::AbsDiffEq for $ty<T>
        where
            T: $crate::Scalar + approx::AbsDiffEq<Epsilon = T>,
        {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl<T> approx::RelativeEq for $ty<T>
        where
            T: $crate::Scalar + approx::RelativeEq<Epsilon = T>,
        {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }
    };
}

/// Implements `scalar * value` for the concrete scalar types by delegating to
/// `value * scalar`.
macro_rules! impl_scalar_lhs_mul {
    ($ty:ident) => {
        impl_scalar_lhs_mul!($ty; u8, i32, f32, f64);
    };
    ($ty:ident; $($s:ty),+) => {
        $(
            impl std::ops::Mul<$ty<$s>> for $s {
                type Output = $ty<$s>;
                #[inline]
                fn mul(self, value: $ty<$s>) -> $ty<$s> {
                    value * self
                }
            }
        )+
    };
}

/// Implements `Zeroable`/`Pod` for a `#[repr(C)]` struct whose fields are all `T`.
macro_rules! impl_pod {
    ($ty:ident) => {
        // SAFETY: `#[repr(C)]` with every field of type `T`, so there is no
        // padding and any bit pattern valid for `T` is valid for the struct.
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $ty<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $ty<T> {}
    };
}
