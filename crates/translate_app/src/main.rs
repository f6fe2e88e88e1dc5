mod platform;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    platform::run_app()
}
