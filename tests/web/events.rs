use super::{click, create_container, document};
use mini_react::{
    component, element, map, on, render, Component, Element, Props, RenderContext, State, Value,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;

#[derive(Default)]
struct App;

impl Component for App {
    fn initial_state(&self, props: &Props) -> State {
        map! { "number" => props.get("number").cloned().unwrap_or(Value::Number(0.0)) }
    }

    fn render(&self, cx: &RenderContext) -> Option<Element> {
        let updater = cx.updater().clone();
        let number = cx.state().get("number")?.as_f64()?;
        Some(element!(
            "div",
            map! { "onClick" => on(move |_| updater.set_state(map! { "number" => number + 1.0 })) },
            number,
        ))
    }
}

#[wasm_bindgen_test]
fn click_calls_the_listener() {
    let container = create_container();
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let node = render(
        &document(),
        element!(
            "button",
            map! {
                "onClick" => on(move |event| {
                    assert_eq!(event.kind(), "click");
                    assert!(event.raw().is_some());
                    counter.set(counter.get() + 1);
                    Ok(())
                }),
            },
            "press",
        ),
        &container,
    )
    .unwrap();

    click(&node);
    click(&node);
    assert_eq!(clicks.get(), 2);
}

#[wasm_bindgen_test]
fn set_state_replaces_the_node() {
    let container = create_container();
    let before = render(
        &document(),
        element!(component::<App>(), map! { "number" => 2 }),
        &container,
    )
    .unwrap();

    click(&before);

    let after = container.first_child().expect("container should have a child");
    assert!(!after.is_same_node(Some(&before)));
    assert_eq!(after.text_content().unwrap_or_default(), "3");
    assert!(before.parent_node().is_none());
    assert_eq!(container.child_nodes().length(), 1);
}
