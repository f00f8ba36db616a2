fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(famplan::App);
}
