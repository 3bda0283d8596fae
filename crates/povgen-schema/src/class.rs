use crate::node::EntityDescriptor;
use povgen_core::{Error, Options, Slot, Value};
use std::fmt;

///
/// Class
///
/// Implemented by every generated class. `assign` and `get` route attribute
/// names to the class's own mutators and accessors, and fall through to the
/// superclass for names the class does not declare.
///

pub trait Class: Clone + fmt::Debug {
    const NAME: &'static str;

    fn descriptor() -> &'static EntityDescriptor;

    /// Assign through the named attribute's mutator.
    fn assign(&mut self, name: &str, val: Slot) -> Result<(), Error>;

    /// Read through the named attribute's accessor.
    fn get(&self, name: &str) -> Result<Option<Value>, Error>;

    /// Assign every option, or none of them.
    fn apply(&mut self, options: Options) -> Result<(), Error> {
        let mut next = self.clone();
        for (name, val) in options {
            next.assign(&name, val)?;
        }
        *self = next;

        Ok(())
    }

    /// First required attribute that currently has no value.
    fn missing_required(&self) -> Option<&'static str> {
        Self::descriptor()
            .required()
            .find(|rule| !matches!(self.get(rule.name), Ok(Some(_))))
            .map(|rule| rule.name)
    }

    /// Fails with `MissingRequired` when a required attribute is unset.
    fn require(&self) -> Result<(), Error> {
        match self.missing_required() {
            Some(attribute) => Err(Error::missing_required(Self::NAME, attribute)),
            None => Ok(()),
        }
    }
}
