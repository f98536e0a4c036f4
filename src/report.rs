//! The demonstration suite: build a tree from loaded keys and print what every
//! query and traversal says about it as keys are probed, removed, and added
//! back again.

use std::fmt::Display;
use std::io::{self, Write};

use tracing::{debug, info};

use crate::error::{LoadResult, SuiteResult};
use crate::traversal::Order;
use crate::tree::Tree;

/// Probed, removed, and re-added in the integer suite.
pub const INTEGER_PROBES: [i32; 8] = [20, 40, 10, 70, 99, -2, 59, 43];

/// Probed, removed, and re-added in the string suite.
pub const STRING_PROBES: [&str; 8] = ["gene", "mary", "bea", "uma", "yan", "amy", "ron", "opal"];

const TITLE_STARS: usize = 30;
const BANNER_STARS: usize = 2;

fn stars(n: usize) -> String {
    "*".repeat(n)
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

/// Writes the report for trees to `W`.
pub struct Report<W> {
    out: W,
}

impl<W> Report<W>
where
    W: Write,
{
    /// Generate a report writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// What the program is about to do.
    pub fn intro(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "\nWelcome to the Binary Search Tree (BST) program! This program\n\
             tests the functionality of the BST type. An integer tree and a\n\
             string tree are built from files and every method is exercised."
        )
    }

    /// Signs off.
    pub fn outro(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "\n\nGoodbye, and thanks for using the Binary Search Tree program!"
        )?;
        self.out.flush()
    }

    /// The boxed heading for the suite of one key type, e.g. `INTEGER`.
    pub fn title(&mut self, kind: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", stars(TITLE_STARS))?;
        writeln!(self.out, "* {} BINARY SEARCH TREE *", kind)?;
        writeln!(self.out, "{}", stars(TITLE_STARS))
    }

    /// The heading for one step of a suite.
    pub fn banner(&mut self, name: &str) -> io::Result<()> {
        let stars = stars(BANNER_STARS);
        writeln!(self.out)?;
        writeln!(self.out, "{} {} {}", stars, name, stars)
    }

    /// Every shape query on `tree`.
    pub fn properties<K>(&mut self, tree: &Tree<K>) -> io::Result<()> {
        writeln!(self.out, "# of nodes:     {}", tree.size())?;
        writeln!(self.out, "# of leaves:    {}", tree.leaf_count())?;
        writeln!(self.out, "BST height:     {}", tree.height())?;
        writeln!(self.out, "BST width:      {}", tree.width())?;
        writeln!(self.out, "BST is empty:   {}", yes_no(tree.is_empty()))
    }

    /// Every traversal of `tree`.
    pub fn traversals<K>(&mut self, tree: &Tree<K>) -> io::Result<()>
    where
        K: Display,
    {
        self.banner("TEST TRAVERSALS")?;
        for order in Order::ALL {
            writeln!(self.out, "{:<14}{}", order.label(), tree.traversal(order))?;
        }
        Ok(())
    }

    /// Adds `keys` to `tree` in order, echoing each one.
    pub fn add<K, I>(&mut self, banner: &str, tree: &mut Tree<K>, keys: I) -> io::Result<()>
    where
        K: Ord + Display,
        I: IntoIterator<Item = K>,
    {
        self.banner(banner)?;
        write!(self.out, "Inserting in this order: ")?;
        for key in keys {
            write!(self.out, "{} ", key)?;
            tree.add(key);
        }
        writeln!(self.out)
    }

    /// Removes `keys` from `tree` in order, echoing each one.
    pub fn remove<K>(&mut self, tree: &mut Tree<K>, keys: &[K]) -> io::Result<()>
    where
        K: Ord + Display,
    {
        self.banner("TEST REMOVE")?;
        write!(self.out, "Removing in this order: ")?;
        for key in keys {
            write!(self.out, "{} ", key)?;
            tree.remove(key);
        }
        writeln!(self.out)
    }

    /// Whether `tree` has each of `keys`.
    pub fn has<K>(&mut self, tree: &Tree<K>, keys: &[K]) -> io::Result<()>
    where
        K: Ord + Display,
    {
        self.banner("TEST HAS")?;
        for key in keys {
            writeln!(self.out, "has({}): {}", key, yes_no(tree.has(key)))?;
        }
        Ok(())
    }

    fn checkpoint<K>(&mut self, tree: &Tree<K>) -> io::Result<()>
    where
        K: Display,
    {
        self.properties(tree)?;
        self.traversals(tree)
    }

    /// Runs the whole suite for one key type and returns the final tree.
    ///
    /// The empty tree is reported before `load` is called. If loading fails
    /// nothing more is written and the tree is never touched; the error is
    /// returned so the caller can report it and move on.
    pub fn suite<K, F>(&mut self, kind: &str, load: F, probes: &[K]) -> SuiteResult<Tree<K>>
    where
        K: Ord + Display + Clone,
        F: FnOnce() -> LoadResult<Vec<K>>,
    {
        self.title(kind)?;
        let mut tree = Tree::new();
        self.banner("CREATE BST")?;
        self.properties(&tree)?;
        self.out.flush()?;

        let keys = load()?;
        info!(kind, keys = keys.len(), "Running suite");

        self.add("TEST ADD", &mut tree, keys)?;
        self.checkpoint(&tree)?;

        self.has(&tree, probes)?;

        self.remove(&mut tree, probes)?;
        debug!(kind, size = tree.size(), "Removed probes");
        self.checkpoint(&tree)?;

        self.add("TEST ADD (again)", &mut tree, probes.iter().cloned())?;
        debug!(kind, size = tree.size(), "Added probes back");
        self.checkpoint(&tree)?;

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::{LoadError, SuiteError};

    fn output(report: Report<Vec<u8>>) -> String {
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn title() {
        let mut report = Report::new(Vec::new());
        report.title("INTEGER").unwrap();

        assert_eq!(
            output(report),
            "\n\n******************************\n\
             * INTEGER BINARY SEARCH TREE *\n\
             ******************************\n"
        );
    }

    #[test]
    fn properties_of_empty_tree() {
        let mut report = Report::new(Vec::new());
        report.properties(&Tree::<i32>::new()).unwrap();

        assert_eq!(
            output(report),
            "# of nodes:     0\n\
             # of leaves:    0\n\
             BST height:     0\n\
             BST width:      0\n\
             BST is empty:   True\n"
        );
    }

    #[test]
    fn traversals_line_up() {
        let tree: Tree<_> = [2, 1, 3].into_iter().collect();
        let mut report = Report::new(Vec::new());
        report.traversals(&tree).unwrap();

        assert_eq!(
            output(report),
            "\n** TEST TRAVERSALS **\n\
             Pre-order:    2 1 3 \n\
             In-order:     1 2 3 \n\
             Post-order:   1 3 2 \n\
             Level-order:  2 1 3 \n"
        );
    }

    #[test]
    fn has_prints_each_probe() {
        let tree: Tree<_> = [59].into_iter().collect();
        let mut report = Report::new(Vec::new());
        report.has(&tree, &[59, 100]).unwrap();

        assert_eq!(
            output(report),
            "\n** TEST HAS **\nhas(59): True\nhas(100): False\n"
        );
    }

    #[test]
    fn integer_suite_restores_tree() {
        let mut report = Report::new(Vec::new());
        let tree = report
            .suite("INTEGER", || Ok(INTEGER_PROBES.to_vec()), &INTEGER_PROBES)
            .unwrap();

        assert_eq!(tree.pre_order_traversal(), "20 10 -2 40 70 59 43 99 ");

        let out = output(report);
        assert!(out.contains("Inserting in this order: 20 40 10 70 99 -2 59 43 \n"));
        assert!(out.contains("Removing in this order: 20 40 10 70 99 -2 59 43 \n"));
        assert!(out.contains("has(99): True\n"));
        // After every probe is removed the tree is empty again.
        assert!(out.contains("# of nodes:     0\n# of leaves:    0\n"));
        assert_eq!(out.matches("** TEST TRAVERSALS **").count(), 3);
    }

    #[test]
    fn string_suite_keeps_unprobed_keys() {
        let keys = ["zed", "gene", "amy"].map(String::from).to_vec();
        let probes = STRING_PROBES.map(String::from);
        let mut report = Report::new(Vec::new());

        let tree = report.suite("STRING", || Ok(keys), &probes).unwrap();

        assert!(tree.has(&"zed".to_string()));
        assert_eq!(tree.size(), 9);
        let out = output(report);
        assert!(out.contains("has(gene): True\n"));
        assert!(out.contains("has(opal): False\n"));
        assert!(out.contains("Pre-order:    zed \n"));
    }

    #[test]
    fn failed_load_stops_after_empty_tree() {
        let mut report = Report::new(Vec::new());
        let result = report.suite::<i32, _>(
            "INTEGER",
            || {
                Err(LoadError::Open {
                    path: PathBuf::from("missing.txt"),
                    source: io::Error::from(io::ErrorKind::NotFound),
                })
            },
            &INTEGER_PROBES,
        );

        assert!(matches!(result, Err(SuiteError::Load(LoadError::Open { .. }))));
        let out = output(report);
        assert!(out.ends_with("** CREATE BST **\n# of nodes:     0\n# of leaves:    0\nBST height:     0\nBST width:      0\nBST is empty:   True\n"));
        assert!(!out.contains("TEST ADD"));
    }
}
