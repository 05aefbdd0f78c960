fn main() {
    dioxus::launch(avitolog_web::App);
}
