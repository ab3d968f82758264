use std::fs::File;
use std::io::BufWriter;

use rb_tree_map::{Layout, RbTree};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn leaf(key: i32) -> Layout<i32, ()> {
    Layout::leaf(key, ())
}

fn node(key: i32) -> Layout<i32, ()> {
    Layout::node(key, ())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let node3 = node(3).with_left(leaf(3)).with_right(leaf(10));
    let node19 = node(19).with_left(leaf(19)).with_right(leaf(23));
    let node30 = node(30).with_left(leaf(30)).with_right(leaf(37));
    let node59 = node(59).with_left(leaf(59)).with_right(leaf(62));
    let node70 = node(70).with_left(leaf(70)).with_right(leaf(80));
    let node100 = node(100).with_left(leaf(100));

    let node10 = node(10).with_left(node3).with_right(node19);
    let node37 = node(37).with_left(node30).with_right(leaf(49));
    let node62 = node(62).with_left(node59).with_right(node70);
    let node89 = node(89).with_right(node100);

    let node23 = node(23).with_left(node10).with_right(node37);
    let node80 = node(80).with_left(node62).with_right(node89);

    let tree = RbTree::from_layout(node(49).with_left(node23).with_right(node80));

    serde_json::to_writer_pretty(BufWriter::new(File::create("tree.json")?), &tree.snapshot())?;
    println!("{}", serde_json::to_string(&tree.snapshot())?);

    let keys = tree.values_in_range(19, 77);
    println!("keys in [19, 77]: {keys:?}");
    Ok(())
}
