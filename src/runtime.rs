//! The two seams the bootstrap sequence talks through: the hosting document and the
//! rendering runtime. Keeping them behind traits lets the sequence run against an in-memory
//! document in tests.

use crate::stylesheets::Stylesheet;
use crate::types::BootError;

/// The document hosting the application.
pub trait HostDocument {
    /// The element type returned by lookups.
    type Node;

    /// Looks up the element with the given id. This must not mutate the document.
    fn find_mount_point(&self, id: &str) -> Option<Self::Node>;

    /// Registers a global stylesheet. Sheets registered later take precedence for
    /// conflicting selectors.
    fn register_stylesheet(&mut self, sheet: &Stylesheet) -> Result<(), BootError>;
}

/// A rendering runtime able to mount a component tree into a document node.
pub trait RenderRuntime {
    /// The element type a root is bound to.
    type Node;
    /// Bookkeeping for one mounted subtree.
    type Root;
    /// A component tree ready to be rendered.
    type Tree;

    /// Creates a render root bound to `node`.
    fn create_root(&mut self, node: Self::Node) -> Result<Self::Root, BootError>;

    /// Renders `tree` into `root`.
    ///
    /// The first call mounts the tree. Later calls on the same root reconcile against
    /// what is already mounted instead of rebuilding it.
    fn render(&mut self, root: &mut Self::Root, tree: Self::Tree) -> Result<(), BootError>;
}
