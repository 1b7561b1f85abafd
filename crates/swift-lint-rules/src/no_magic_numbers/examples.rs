use swift_lint_core::Example;

pub(super) const NON_TRIGGERING: &[Example] = &[
    Example::new("var foo = 123"),
    Example::new("static let bar: Double = 0.123"),
    Example::new("let a = b + 1.0"),
    Example::new("array[0] + array[1] "),
    Example::new("let foo = 1_000.000_01"),
    Example::new("// array[1337]"),
    Example::new("baz(\"9999\")"),
    Example::new(
        "func foo() {
    let x: Int = 2
    let y = 3
    let vector = [x, y, -1]
}",
    ),
    Example::new(
        "class A {
    var foo: Double = 132
    static let bar: Double = 0.98
}",
    ),
    Example::new(
        "@available(iOS 13, *)
func version() {
    if #available(iOS 13, OSX 10.10, *) {
        return
    }
}",
    ),
];

pub(super) const TRIGGERING: &[Example] = &[
    Example::new("foo(↓321)"),
    Example::new("bar(↓1_000.005_01)"),
    Example::new("array[↓42]"),
    Example::new("let box = array[↓12 + ↓14]"),
    Example::new("let a = b + ↓2.0"),
    Example::new("Color.primary.opacity(isAnimate ? ↓0.1 : ↓1.5)"),
];
