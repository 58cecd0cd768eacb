use sankey_flows::example_apps::run_sankey_demo;

fn main() {
    if let Err(err) = run_sankey_demo() {
        eprintln!("sankey_demo: {err}");
        std::process::exit(1);
    }
}
