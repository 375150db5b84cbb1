use uuid::Uuid;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

/// Modal sheet shown over the page while `open` is set.
///
/// Clicking the backdrop emits `on_dismiss`; clicks inside the sheet do not
/// reach the backdrop.
pub struct DialogSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub title: AttrValue,
    pub on_dismiss: Callback<()>,
}

impl Component for DialogSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("dialog-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let title_id = format!("{}-title", self.id);
        let on_backdrop = {
            let on_dismiss = props.on_dismiss.clone();
            Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
        };
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="dialog-backdrop" onclick={on_backdrop}>
                <div
                    class="dialog-sheet show"
                    id={self.id.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                    onclick={keep_open}
                >
                    <h2 class="dialog-title" id={title_id}>{ props.title.clone() }</h2>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
