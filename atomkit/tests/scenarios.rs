use atomkit::*;
use std::cell::Cell;
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = count.clone();
    (count, move || handle.set(handle.get() + 1))
}

#[test]
fn success_alert_without_dismiss() {
    let tree = alert(AlertVariant::Success, "Saved.").build();

    assert_eq!(tree.query_all_by_role(Role::Alert).len(), 1);
    assert!(tree.query_by_role(Role::Img, "success alert").is_some());
    assert_eq!(tree.query_all_by_text("Saved.").len(), 1);
    assert!(tree.query_all_by_role(Role::Button).is_empty());
}

#[test]
fn warning_alert_dismissed_once() {
    let (count, handler) = counter();
    let tree = alert(AlertVariant::Warning, "Check input.")
        .dismissible(true)
        .on_dismiss(handler)
        .build();

    tree.get_by_role(Role::Button, "Dismiss alert").activate();

    assert_eq!(count.get(), 1);
}

#[test]
fn ghost_and_secondary_backgrounds() {
    let ghost = button("Ghost").variant(ButtonVariant::Ghost).build();
    let secondary = button("Secondary").variant(ButtonVariant::Secondary).build();

    assert_eq!(
        ghost.style_value(StyleProp::BackgroundColor),
        Some(TOKENS.colors.transparent)
    );
    assert_eq!(
        secondary.style_value(StyleProp::BackgroundColor),
        Some(TOKENS.colors.neutral.white)
    );
}

#[test]
fn alert_backgrounds_match_palette() {
    let success = success_alert("Success").build();
    let error = error_alert("Error").build();

    assert_eq!(success.style_value(StyleProp::BackgroundColor), Some("#d4edda"));
    assert_eq!(error.style_value(StyleProp::BackgroundColor), Some("#f8d7da"));
}

#[test]
fn alert_text_colors_never_leak_across_variants() {
    for variant in AlertVariant::ALL {
        let tree = alert(variant, "body").title("head").build();
        let expected = TOKENS.colors.variant(variant).text;
        for text_node in tree.descendants().into_iter().filter(|n| n.tag == Tag::Text) {
            assert_eq!(text_node.style_value(StyleProp::Color), Some(expected));
        }
    }
}

#[test]
fn disabled_button_stays_at_zero_invocations() {
    let (count, handler) = counter();
    let tree = button("Click me").disabled(true).on_activate(handler).build();

    for _ in 0..10 {
        tree.get_by_role(Role::Button, "Click me").activate();
    }

    assert_eq!(count.get(), 0);
}

#[test]
fn enabled_button_counts_each_activation() {
    let (count, handler) = counter();
    let tree = button("Click me").on_activate(handler).build();

    for expected in 1..=4 {
        tree.activate();
        assert_eq!(count.get(), expected);
    }
}

#[test]
fn rendered_tree_serializes_without_callbacks() {
    let tree = info_alert("Heads up").dismissible(true).on_dismiss(|| {}).build();
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["explicit_role"], "alert");
    assert_eq!(json["style"]["background-color"], "#d1ecf1");
    assert_eq!(json["children"][2]["aria_label"], "Dismiss alert");
    assert!(json["children"][2].get("on_activate").is_none());
}
