fn main() {
    carta::app::cli::run();
}
