use crate::app::App;

mod app;
mod components;
mod logging;
mod storage;
mod tops_sheet;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
