fn main() {
    top10::cli::run();
}
