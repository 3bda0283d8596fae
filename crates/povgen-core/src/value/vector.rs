use derive_more::Display;

///
/// VectorKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum VectorKind {
    #[display("Color")]
    Color,
    #[display("VectorUV")]
    Uv,
    #[display("VectorXY")]
    Xy,
    #[display("VectorXYZ")]
    Xyz,
    #[display("VectorXYZW")]
    Xyzw,
}

impl VectorKind {
    pub const ALL: [Self; 5] = [Self::Xy, Self::Uv, Self::Xyz, Self::Xyzw, Self::Color];

    /// Name of the generated class backing this kind.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Uv => "VectorUV",
            Self::Xy => "VectorXY",
            Self::Xyz => "VectorXYZ",
            Self::Xyzw => "VectorXYZW",
        }
    }

    #[must_use]
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.class_name() == name)
    }

    #[must_use]
    pub const fn components(self) -> &'static [&'static str] {
        match self {
            Self::Color => &["r", "g", "b", "f", "t"],
            Self::Uv => &["u", "v"],
            Self::Xy => &["x", "y"],
            Self::Xyz => &["x", "y", "z"],
            Self::Xyzw => &["x", "y", "z", "w"],
        }
    }

    /// Smallest number of components accepted on input. Colors may omit the
    /// filter and transmit channels.
    #[must_use]
    pub const fn min_arity(self) -> usize {
        match self {
            Self::Color => 3,
            _ => self.components().len(),
        }
    }

    #[must_use]
    pub const fn arity(self) -> usize {
        self.components().len()
    }
}

///
/// Vector
///
/// Fixed-arity numeric tuple. Colors are always stored with five channels.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    kind: VectorKind,
    components: Vec<f64>,
}

impl Vector {
    /// Build a vector, returning `None` when the component count is outside
    /// the range the kind accepts or a component is not finite.
    #[must_use]
    pub fn new(kind: VectorKind, components: impl Into<Vec<f64>>) -> Option<Self> {
        let mut components = components.into();

        if components.len() < kind.min_arity()
            || components.len() > kind.arity()
            || components.iter().any(|c| !c.is_finite())
        {
            return None;
        }
        components.resize(kind.arity(), 0.0);

        Some(Self { kind, components })
    }

    #[must_use]
    pub const fn kind(&self) -> VectorKind {
        self.kind
    }

    #[must_use]
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Component by name, e.g. `"y"` or `"t"`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        let index = self.kind.components().iter().position(|c| *c == name)?;

        self.components.get(index).copied()
    }
}
