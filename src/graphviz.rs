use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::index::IndexType;
use crate::tree::RbTree;

impl<K, V, C, Ix> RbTree<K, V, C, Ix>
where
    K: Display,
    Ix: IndexType,
{
    /// Write the tree as a graphviz `dot` file, nodes filled with their color.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can not be created or written.
    pub fn draw(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut f = BufWriter::new(File::create(path)?);
        self.write_dot(&mut f)?;
        f.flush()
    }

    fn write_dot<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "digraph rbtree {{")?;
        writeln!(w, "    node [style=filled, fontcolor=white];")?;
        for (i, node) in self.nodes.iter().enumerate() {
            let fill = if node.is_red() { "red" } else { "black" };
            let shape = if node.leaf { "box" } else { "ellipse" };
            writeln!(
                w,
                "    n{i} [label=\"{}\", fillcolor={fill}, shape={shape}];",
                node.key()
            )?;
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(l) = node.left() {
                writeln!(w, "    n{i} -> n{} [label=\"L\"];", l.index())?;
            }
            if let Some(r) = node.right() {
                writeln!(w, "    n{i} -> n{} [label=\"R\"];", r.index())?;
            }
        }
        writeln!(w, "}}")
    }
}
