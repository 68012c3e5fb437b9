use shiftrix::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
