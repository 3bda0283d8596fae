use super::*;
use povgen_core::validate::{is_float, is_int};
use povgen_schema::node::Def;

static SHAPE: EntityDescriptor = EntityDescriptor {
    def: Def::new("fixtures", "SHAPE"),
    name: "Shape",
    mutable: &[AttributeRule::new("active", "boolean")
        .default_value(Constant::Bool(true))
        .check(povgen_core::validate::is_bool, "active must be a boolean.")],
    ..EntityDescriptor::EMPTY
};

static BOX: EntityDescriptor = EntityDescriptor {
    def: Def::new("fixtures", "BOX"),
    name: "Box",
    superclass: Some("Shape"),
    immutable: &[
        Immutable::new("finite", Constant::Bool(true)),
        Immutable::new("csgOperand", Constant::Null),
    ],
    mutable: &[
        AttributeRule::new("corner1", "VectorXYZ")
            .required()
            .check(is_float, "corner1 must be a VectorXYZ."),
        AttributeRule::new("type", "integer").check(is_int, "type must be an integer."),
        AttributeRule::new("anything", "any"),
    ],
    ..EntityDescriptor::EMPTY
};

static PAIR: EntityDescriptor = EntityDescriptor {
    def: Def::new("fixtures", "PAIR"),
    name: "Pair",
    description: Some("Two numbers."),
    mutable: &[
        AttributeRule::new("x", "float").check(is_float, "x must be a float."),
        AttributeRule::new("y", "float")
            .check(is_float, "y must be a float.")
            .default_value(Constant::Float(1.0)),
    ],
    constructor_args: Some("x: f64"),
    constructor_body: Some("this.set_x(x)?;\n\nif x < 0.0 {\n    this.set_y(-1.0)?;\n}"),
    ..EntityDescriptor::EMPTY
};

fn build(desc: &EntityDescriptor) -> String {
    ClassBuilder::new(desc, &Style::default()).generate().unwrap()
}

#[test]
fn header_uses_description_or_default() {
    let src = build(&BOX);
    let mut lines = src.lines();

    assert_eq!(lines.next().map(str::len), Some(80));
    assert_eq!(lines.next(), Some("// Box class"));
    assert!(lines.next().is_some_and(|l| l.starts_with("//====")));

    assert!(build(&PAIR).contains("\n// Two numbers.\n"));
}

#[test]
fn declaration_composes_the_superclass() {
    let src = build(&BOX);

    assert!(src.contains("#[derive(Clone, Debug)]\npub struct Box {\n    base: Shape,\n"));
    assert!(src.contains("    finite: Option<Value>,\n"));
    assert!(src.contains("    csg_operand: Option<Value>,\n"));
    assert!(src.contains("    corner1: Slot,\n"));
    assert!(src.contains("impl ::std::ops::Deref for Box {\n    type Target = Shape;"));
    assert!(src.contains("impl ::std::ops::DerefMut for Box {"));
}

#[test]
fn initializers_are_aligned() {
    let src = build(&BOX);

    assert!(src.contains(
        "            // Immutable properties //\n            \
         finite:      Some(Value::Bool(true)),\n            \
         csg_operand: None,\n"
    ));
    assert!(src.contains("            corner1:  Slot::Unset,\n"));
    assert!(src.contains("            anything: Slot::Unset,\n"));
    assert!(build(&SHAPE).contains("active: Slot::Literal(Value::Bool(true)),"));
}

#[test]
fn default_constructor_routes_options() {
    let src = build(&BOX);

    assert!(src.contains("pub fn new(options: Options) -> Result<Self, Error> {"));
    assert!(src.contains("base: Shape::new(Options::new())?,"));
    assert!(src.contains(
        "        for (name, val) in options {\n            this.assign(&name, val)?;\n        }"
    ));
    assert!(src.contains("        Ok(this)\n    }"));
}

#[test]
fn custom_constructor_is_reindented() {
    let src = build(&PAIR);

    assert!(src.contains("pub fn new(x: f64) -> Result<Self, Error> {"));
    assert!(src.contains(
        "        this.set_x(x)?;\n\n        if x < 0.0 {\n            this.set_y(-1.0)?;\n        }\n"
    ));
    assert!(src.contains("y: Slot::Literal(Value::Float(1.0)),"));
    assert!(!src.contains("for (name, val) in options"));
}

#[test]
fn immutable_setters_fail() {
    let src = build(&BOX);

    assert!(src.contains("pub fn set_finite(&mut self, _val: impl Into<Slot>) -> Result<(), Error> {"));
    assert!(src.contains("Err(Error::read_only(Self::NAME, \"finite\"))"));
}

#[test]
fn mutable_setters_validate_through_the_rule() {
    let src = build(&BOX);

    assert!(src.contains("let rule = &Self::descriptor().mutable[0];\n        self.corner1 = rule.accept"));
    assert!(src.contains("let rule = &Self::descriptor().mutable[1];\n        self.r#type = rule.accept"));
}

#[test]
fn unvalidated_attribute_is_flagged() {
    let src = build(&BOX);

    assert!(src.contains("// FIXME: anything has no validator; every value is accepted."));
    assert!(src.contains("self.anything = val.into();"));
}

#[test]
fn keyword_attributes_use_raw_idents() {
    let src = build(&BOX);

    assert!(src.contains("pub fn r#type(&self) -> Option<Value> {"));
    assert!(src.contains("pub fn set_type(&mut self, val: impl Into<Slot>)"));
    assert!(src.contains("\"type\" => Ok(self.r#type()),"));
}

#[test]
fn class_impl_delegates_unknown_names() {
    let boxed = build(&BOX);
    assert!(boxed.contains("&::fixtures::BOX"));
    assert!(boxed.contains("_ => self.base.assign(name, val),"));
    assert!(boxed.contains("_ => self.base.get(name),"));
    assert!(boxed.contains("\"csgOperand\" => self.set_csg_operand(val),"));

    let root = build(&SHAPE);
    assert!(root.contains("_ => Err(Error::unknown_attribute(Self::NAME, name)),"));
    assert!(!root.contains("Deref"));
}

#[test]
fn nested_output_is_indented() {
    let style = Style::default().at_depth(1);
    let src = ClassBuilder::new(&BOX, &style).generate().unwrap();

    let header = src.lines().next().unwrap();
    assert!(header.starts_with("    //===="));
    assert_eq!(header.len(), 80);
    assert!(src.contains("\n    pub struct Box {\n        base: Shape,\n"));
}

#[test]
fn output_parses_as_rust() {
    for desc in [&SHAPE, &BOX, &PAIR] {
        let src = build(desc);
        if let Err(e) = syn::parse_file(&src) {
            panic!("{} does not parse: {e}\n{src}", desc.name);
        }
    }
}

#[test]
fn constants_render_as_expressions() {
    assert_eq!(constant_expr(Constant::Null), None);
    assert_eq!(
        constant_expr(Constant::Float(0.5)).as_deref(),
        Some("Value::Float(0.5)")
    );
    assert_eq!(constant_expr(Constant::Int(-3)).as_deref(), Some("Value::Int(-3)"));
    assert_eq!(
        constant_expr(Constant::Str("a\"b")).as_deref(),
        Some("Value::from(\"a\\\"b\")")
    );
}

#[test]
fn naming_helpers() {
    assert_eq!(field_ident("csgOperand"), "csg_operand");
    assert_eq!(field_ident("type"), "r#type");
    assert_eq!(setter_ident("type"), "set_type");
    assert_eq!(field_ident("corner1"), "corner1");
    assert_eq!(setter_ident("corner1"), "set_corner1");
    assert_eq!(field_ident("blurSamples"), "blur_samples");
    assert_eq!(module_ident("GlobalSettings"), "global_settings_class");
}
