//! Slide-down top sheet used for blocking notices (the demo-session
//! warning). The sheet element sits in the DOM permanently; showing and
//! hiding toggle a `show` class so the CSS transition can run.

use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(sheet_ref: NodeRef) {
    toggle_show_class(sheet_ref, "add");
}

pub fn close_top_sheet(sheet_ref: NodeRef) {
    toggle_show_class(sheet_ref, "remove");
}

// classList is toggled through a deferred snippet so the transition still
// fires when the sheet was mounted in the same tick.
fn toggle_show_class(sheet_ref: NodeRef, method: &str) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            sheet.id(),
            method
        ));
        if let Some(window) = web_sys::window() {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
                .ok();
        }
    }
}
