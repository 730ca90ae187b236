fn main() -> anyhow::Result<()> {
    contact_finder::cli::run()
}
