use int_bst::{Tree, TreeError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let values = [4, 2, 5, 1, 3];
    let tree = Tree::from_values(&values);
    info!(?values, size = tree.size(), depth = tree.max_depth(), "built tree");

    println!("{}", tree.min_value()?);

    let postorder: Vec<String> = tree.postorder().map(|v| v.to_string()).collect();
    println!("{}", postorder.join(" "));
    for path in tree.paths() {
        let path: Vec<String> = path.iter().map(|v| v.to_string()).collect();
        println!("{}", path.join(" "));
    }

    Ok(())
}
