use std::sync::Arc;

use trellis_core::{
    disabled, empty_invisible_panel, from_fn, invisible, model, of_instance, provide,
    Component, ConstructionCause, Container, DelegatingSupplier, Error, HeadlineBehavior, Label,
    Layout, Panel, SharedSupplier, Supplier,
};

#[test]
fn label_built_with_id_then_arguments() {
    let label = provide::<Label>()
        .with_model(model::of("Welcome".to_string()))
        .with_behavior(Arc::new(HeadlineBehavior::new(1)))
        .resolve("title")
        .unwrap();

    assert_eq!(label.id(), "title");
    assert_eq!(label.text().unwrap(), "Welcome");
    assert_eq!(label.behaviors().len(), 1);
}

#[test]
fn extra_integer_argument_fails_with_signature() {
    let err = provide::<Panel>()
        .with_argument(42u32)
        .resolve("panel")
        .unwrap_err();

    match err {
        Error::Construction {
            kind,
            arguments,
            cause: ConstructionCause::NoMatchingConstructor { available },
        } => {
            assert!(kind.ends_with("Panel"));
            assert!(arguments.contains("u32"));
            assert!(arguments.contains("String"));
            assert_eq!(available.len(), 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn concrete_model_type_does_not_widen() {
    // A StaticModel is not declared as SharedModel<String>.
    let err = provide::<Label>()
        .with_argument(Arc::new(trellis_core::StaticModel::new("x".to_string())))
        .resolve("label")
        .unwrap_err();
    assert!(matches!(err, Error::Construction { .. }));
}

#[test]
fn combinators_are_idempotent() {
    let panels: SharedSupplier<Panel> = Arc::new(from_fn(Panel::new));

    let hidden = invisible(Arc::clone(&panels));
    assert!(Arc::ptr_eq(&hidden, &invisible(Arc::clone(&hidden))));

    let off = disabled(Arc::clone(&panels));
    assert!(Arc::ptr_eq(&off, &disabled(Arc::clone(&off))));

    // A plain delegating layer over a hidden supplier carries no tag itself.
    let layered: SharedSupplier<Panel> = Arc::new(DelegatingSupplier::new(Arc::clone(&hidden)));
    assert!(!Arc::ptr_eq(&layered, &invisible(Arc::clone(&layered))));
}

#[test]
fn container_fills_from_suppliers() {
    let container = Container::with_layout("sidebar", Layout::TopDown);
    let shared = Arc::new(Label::with_text("shared", "always the same"));
    let instance = of_instance(Arc::clone(&shared));

    let _: Arc<Panel> = container.add(&empty_invisible_panel()).unwrap();
    let resolved = container.add(&instance).unwrap();
    assert!(Arc::ptr_eq(&*resolved, &shared));

    let children = container.children();
    assert!(!children[0].is_visible());
    assert_eq!(children[1].id(), "shared");
}
