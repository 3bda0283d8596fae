//! Conversions from the generated vector classes to plain [`Vector`] values,
//! so a constructed `VectorXYZ` can be assigned wherever a vector attribute
//! is expected.

use crate::{classes::*, sdl::attr};
use povgen_core::{Error, Value, Vector, VectorKind};
use povgen_schema::Class;

macro_rules! impl_vector {
    ($($class:ident => $kind:ident),* $(,)?) => {
        $(
            impl $class {
                /// The components as a [`Vector`]. Fails if a required
                /// component is unset or not numeric.
                pub fn to_vector(&self) -> Result<Vector, Error> {
                    let kind = VectorKind::$kind;
                    let mut components = Vec::with_capacity(kind.arity());

                    for name in kind.components() {
                        match attr(self, name) {
                            Some(v) => components.push(v.as_f64().ok_or_else(|| {
                                Error::serialize(Self::NAME, format!("{name} is not a number"))
                            })?),
                            None if components.len() >= kind.min_arity() => break,
                            None => return Err(Error::missing_required(Self::NAME, *name)),
                        }
                    }

                    Vector::new(kind, components).ok_or_else(|| {
                        Error::serialize(Self::NAME, format!("not a valid {kind}"))
                    })
                }
            }

            impl TryFrom<&$class> for Value {
                type Error = Error;

                fn try_from(v: &$class) -> Result<Self, Self::Error> {
                    v.to_vector().map(Self::Vector)
                }
            }
        )*
    };
}

impl_vector! {
    VectorXY => Xy,
    VectorUV => Uv,
    VectorXYZ => Xyz,
    VectorXYZW => Xyzw,
    Color => Color,
}
