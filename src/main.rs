use dioxus::prelude::*;
use gallery_slideshow::components::SlideshowApp;

const SLIDESHOW_CSS: Asset = asset!("/assets/styling/slideshow.css");

fn main() {
    let _ = dioxus::logger::init(tracing::Level::INFO);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#111111" }
        document::Stylesheet { href: SLIDESHOW_CSS }

        SlideshowApp {}
    }
}
