#[cfg(test)]
mod tests;

use crate::format::{self, Divider, FormatError, align, divider_with, tab, wrap};
use convert_case::{Case, Casing};
use povgen_schema::{
    node::{AttributeRule, Constant, EntityDescriptor, Immutable},
    validate::naming::method_name,
};
use proc_macro2::Literal;
use std::fmt::Write as _;

///
/// Style
///
/// Layout knobs for emitted source. `depth` is the nesting level the class
/// is emitted at.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Style {
    pub indent: String,
    pub divider_width: usize,
    pub wrap_width: usize,
    pub depth: usize,
}

impl Style {
    #[must_use]
    pub fn at_depth(&self, depth: usize) -> Self {
        Self {
            depth,
            ..self.clone()
        }
    }

    fn tab(&self, stops: usize) -> String {
        tab(self.depth + stops, &self.indent)
    }

    fn divider(&self, stops: usize, style: Divider) -> String {
        divider_with(
            &self.indent,
            self.depth + stops,
            style,
            self.divider_width,
        )
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            indent: format::INDENT.to_string(),
            divider_width: format::DIVIDER_WIDTH,
            wrap_width: format::WRAP_WIDTH,
            depth: 0,
        }
    }
}

// ----------------------------------------------------------------------------
// naming
// ----------------------------------------------------------------------------

/// Identifier for an attribute's field and getter, raw when it is a keyword.
#[must_use]
pub fn field_ident(attribute: &str) -> String {
    let snake = method_name(attribute);

    if syn::parse_str::<syn::Ident>(&snake).is_ok() {
        snake
    } else {
        format!("r#{snake}")
    }
}

#[must_use]
pub fn setter_ident(attribute: &str) -> String {
    format!("set_{}", method_name(attribute))
}

/// Name of the module a class is emitted into.
#[must_use]
pub fn module_ident(class: &str) -> String {
    format!("{}_class", class.to_case(Case::Snake))
}

/// Rust expression for a constant initializer.
#[must_use]
pub fn constant_expr(constant: Constant) -> Option<String> {
    let expr = match constant {
        Constant::Null => return None,
        Constant::Bool(b) => format!("Value::Bool({b})"),
        Constant::Int(i) => format!("Value::Int({})", Literal::i64_unsuffixed(i)),
        Constant::Float(f) => format!("Value::Float({})", Literal::f64_unsuffixed(f)),
        Constant::Str(s) => format!("Value::from({})", Literal::string(s)),
    };

    Some(expr)
}

///
/// ClassBuilder
///
/// Emits the source of one class from its descriptor.
///

pub struct ClassBuilder<'a> {
    desc: &'a EntityDescriptor,
    style: &'a Style,
}

impl<'a> ClassBuilder<'a> {
    #[must_use]
    pub const fn new(desc: &'a EntityDescriptor, style: &'a Style) -> Self {
        Self { desc, style }
    }

    /// Complete class source: header, struct, inherent impl and trait impls.
    pub fn generate(&self) -> Result<String, FormatError> {
        let mut src = Vec::new();

        src.push(self.header());
        src.push(self.declaration());
        src.push(self.inherent_impl()?);
        src.push(self.class_impl());
        if let Some(deref) = self.deref_impls() {
            src.push(deref);
        }

        Ok(src.join("\n\n"))
    }

    fn name(&self) -> &'static str {
        self.desc.name
    }

    // ------------------------------------------------------------------------
    // header + declaration
    // ------------------------------------------------------------------------

    fn header(&self) -> String {
        let style = self.style;
        let desc = self.desc.description_or_default();

        [
            style.divider(0, Divider::Double),
            wrap(&desc, &format!("{}// ", style.tab(0)), style.wrap_width),
            style.divider(0, Divider::Double),
        ]
        .join("\n")
    }

    fn declaration(&self) -> String {
        let t0 = self.style.tab(0);
        let t1 = self.style.tab(1);
        let mut src = format!("{t0}#[derive(Clone, Debug)]\n{t0}pub struct {} {{\n", self.name());

        if let Some(superclass) = self.desc.superclass {
            let _ = writeln!(src, "{t1}base: {superclass},");
        }
        for imm in self.desc.immutable {
            let _ = writeln!(src, "{t1}{}: Option<Value>,", field_ident(imm.name));
        }
        for rule in self.desc.mutable {
            let _ = writeln!(src, "{t1}{}: Slot,", field_ident(rule.name));
        }
        src.push_str(&t0);
        src.push('}');

        src
    }

    // ------------------------------------------------------------------------
    // constructor
    // ------------------------------------------------------------------------

    fn inherent_impl(&self) -> Result<String, FormatError> {
        let t0 = self.style.tab(0);
        let mut parts = vec![self.constructor()?];

        for imm in self.desc.immutable {
            parts.push(self.immutable_accessors(imm));
        }
        for (i, rule) in self.desc.mutable.iter().enumerate() {
            parts.push(self.mutable_accessors(i, rule));
        }

        Ok(format!(
            "{t0}impl {} {{\n{}\n{t0}}}",
            self.name(),
            parts.join("\n\n")
        ))
    }

    fn constructor(&self) -> Result<String, FormatError> {
        let (t1, t2, t3) = (self.style.tab(1), self.style.tab(2), self.style.tab(3));
        let args = self.desc.constructor_args.unwrap_or("options: Options");

        let mut src = format!("{t1}pub fn new({args}) -> Result<Self, Error> {{\n");
        let _ = writeln!(src, "{t2}let mut this = Self {{");

        if let Some(superclass) = self.desc.superclass {
            let _ = writeln!(src, "{t3}base: {superclass}::new(Options::new())?,");
        }

        if !self.desc.immutable.is_empty() {
            let rows: Vec<[String; 3]> = self
                .desc
                .immutable
                .iter()
                .map(|imm| {
                    let init = constant_expr(imm.value)
                        .map_or_else(|| "None".to_string(), |expr| format!("Some({expr})"));

                    [
                        format!("{t3}{}:", field_ident(imm.name)),
                        " ".to_string(),
                        format!("{init},"),
                    ]
                })
                .collect();

            let _ = writeln!(src, "{t3}// Immutable properties //");
            src.push_str(&trim_lines(&align(&rows)?));
            src.push('\n');
        }

        if !self.desc.mutable.is_empty() {
            let rows: Vec<[String; 3]> = self
                .desc
                .mutable
                .iter()
                .map(|rule| {
                    let init = rule
                        .default
                        .and_then(constant_expr)
                        .map_or_else(|| "Slot::Unset".to_string(), |expr| {
                            format!("Slot::Literal({expr})")
                        });

                    [
                        format!("{t3}{}:", field_ident(rule.name)),
                        " ".to_string(),
                        format!("{init},"),
                    ]
                })
                .collect();

            let _ = writeln!(src, "{t3}// Mutable properties //");
            src.push_str(&trim_lines(&align(&rows)?));
            src.push('\n');
        }

        let _ = writeln!(src, "{t2}}};\n");
        let _ = writeln!(src, "{t2}// Initialization //");

        match self.desc.constructor_body {
            Some(body) => {
                for line in body.lines() {
                    if line.trim().is_empty() {
                        src.push('\n');
                    } else {
                        let _ = writeln!(src, "{t2}{}", line.trim_end());
                    }
                }
            }
            None => {
                let _ = writeln!(src, "{t2}for (name, val) in options {{");
                let _ = writeln!(src, "{t3}this.assign(&name, val)?;");
                let _ = writeln!(src, "{t2}}}");
            }
        }

        let _ = write!(src, "\n{t2}Ok(this)\n{t1}}}");

        Ok(src)
    }

    // ------------------------------------------------------------------------
    // accessors
    // ------------------------------------------------------------------------

    fn immutable_accessors(&self, imm: &Immutable) -> String {
        let (t1, t2) = (self.style.tab(1), self.style.tab(2));
        let field = field_ident(imm.name);
        let setter = setter_ident(imm.name);
        let name = imm.name;

        format!(
            "{rule}\n\n\
             {t1}#[must_use]\n\
             {t1}pub fn {field}(&self) -> Option<Value> {{\n\
             {t2}self.{field}.clone()\n\
             {t1}}}\n\n\
             {t1}pub fn {setter}(&mut self, _val: impl Into<Slot>) -> Result<(), Error> {{\n\
             {t2}Err(Error::read_only(Self::NAME, \"{name}\"))\n\
             {t1}}}",
            rule = self.style.divider(1, Divider::Single),
        )
    }

    fn mutable_accessors(&self, index: usize, rule: &AttributeRule) -> String {
        let (t1, t2, t3) = (self.style.tab(1), self.style.tab(2), self.style.tab(3));
        let field = field_ident(rule.name);
        let setter = setter_ident(rule.name);

        let getter = format!(
            "{t1}#[must_use]\n\
             {t1}pub fn {field}(&self) -> Option<Value> {{\n\
             {t2}match &self.{field} {{\n\
             {t3}Slot::Deferred(f) => Some(f()),\n\
             {t3}Slot::Raw(expr) => Some(Value::Sdl(expr.clone())),\n\
             {t3}Slot::Literal(val) => Some(val.clone()),\n\
             {t3}Slot::Unset => None,\n\
             {t2}}}\n\
             {t1}}}"
        );

        let body = if rule.validator.is_some() {
            format!(
                "{t2}let rule = &Self::descriptor().mutable[{index}];\n\
                 {t2}self.{field} = rule.accept(Self::NAME, val.into())?;"
            )
        } else {
            format!(
                "{t2}// FIXME: {name} has no validator; every value is accepted.\n\
                 {t2}self.{field} = val.into();",
                name = rule.name,
            )
        };

        let setter = format!(
            "{t1}pub fn {setter}(&mut self, val: impl Into<Slot>) -> Result<(), Error> {{\n\
             {body}\n\n\
             {t2}Ok(())\n\
             {t1}}}"
        );

        format!(
            "{}\n\n{getter}\n\n{setter}",
            self.style.divider(1, Divider::Single)
        )
    }

    // ------------------------------------------------------------------------
    // trait impls
    // ------------------------------------------------------------------------

    fn class_impl(&self) -> String {
        let (t0, t1, t2, t3) = (
            self.style.tab(0),
            self.style.tab(1),
            self.style.tab(2),
            self.style.tab(3),
        );
        let name = self.name();

        let attributes: Vec<&str> = self
            .desc
            .immutable
            .iter()
            .map(|imm| imm.name)
            .chain(self.desc.mutable.iter().map(|rule| rule.name))
            .collect();

        let fallback = |call: &str| match self.desc.superclass {
            Some(_) => format!("self.base.{call}"),
            None => "Err(Error::unknown_attribute(Self::NAME, name))".to_string(),
        };

        let mut assign = String::new();
        let mut get = String::new();
        for attribute in &attributes {
            let _ = writeln!(
                assign,
                "{t3}\"{attribute}\" => self.{}(val),",
                setter_ident(attribute)
            );
            let _ = writeln!(
                get,
                "{t3}\"{attribute}\" => Ok(self.{}()),",
                field_ident(attribute)
            );
        }
        let _ = writeln!(assign, "{t3}_ => {},", fallback("assign(name, val)"));
        let _ = writeln!(get, "{t3}_ => {},", fallback("get(name)"));

        format!(
            "{t0}impl Class for {name} {{\n\
             {t1}const NAME: &'static str = \"{name}\";\n\n\
             {t1}fn descriptor() -> &'static EntityDescriptor {{\n\
             {t2}&{path}\n\
             {t1}}}\n\n\
             {t1}fn assign(&mut self, name: &str, val: Slot) -> Result<(), Error> {{\n\
             {t2}match name {{\n\
             {assign}\
             {t2}}}\n\
             {t1}}}\n\n\
             {t1}fn get(&self, name: &str) -> Result<Option<Value>, Error> {{\n\
             {t2}match name {{\n\
             {get}\
             {t2}}}\n\
             {t1}}}\n\
             {t0}}}",
            path = self.desc.def.path(),
        )
    }

    fn deref_impls(&self) -> Option<String> {
        let superclass = self.desc.superclass?;
        let (t0, t1, t2) = (self.style.tab(0), self.style.tab(1), self.style.tab(2));
        let name = self.name();

        Some(format!(
            "{t0}impl ::std::ops::Deref for {name} {{\n\
             {t1}type Target = {superclass};\n\n\
             {t1}fn deref(&self) -> &Self::Target {{\n\
             {t2}&self.base\n\
             {t1}}}\n\
             {t0}}}\n\n\
             {t0}impl ::std::ops::DerefMut for {name} {{\n\
             {t1}fn deref_mut(&mut self) -> &mut Self::Target {{\n\
             {t2}&mut self.base\n\
             {t1}}}\n\
             {t0}}}"
        ))
    }
}

// aligned rows pad the last column too
fn trim_lines(text: &str) -> String {
    text.lines().map(str::trim_end).collect::<Vec<_>>().join("\n")
}
