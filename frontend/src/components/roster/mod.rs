//! Check-in screen: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `RosterProps`, `RosterComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, restore the roster saved in `localStorage` so a reload
//!   lands back on the attendee list.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RosterProps;
pub use state::RosterComponent;

impl Component for RosterComponent {
    type Message = Msg;
    type Properties = RosterProps;

    fn create(ctx: &Context<Self>) -> Self {
        RosterComponent::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.restored {
            self.restored = true;
            ctx.link().send_message(Msg::Restore);
        }
    }
}
