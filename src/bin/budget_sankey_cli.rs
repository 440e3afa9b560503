fn main() {
    budget_sankey::init();

    if let Err(err) = budget_sankey::cli::run_cli() {
        eprintln!("budget_sankey: {err}");
        std::process::exit(1);
    }
}
