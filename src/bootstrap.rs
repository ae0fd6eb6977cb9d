//! The one-time startup sequence wiring the hosting document to the application's
//! component tree.

use crate::config::BootConfig;
use crate::runtime::{HostDocument, RenderRuntime};
use crate::stylesheets::CascadePlan;
use crate::types::{BootError, Phase};
use log::{debug, info};

/// An unmounted application, ready to be mounted exactly once.
///
/// `mount` consumes the bootstrap, so a second mount through the same value cannot be
/// expressed.
#[derive(Debug)]
pub struct Bootstrap {
    mount_point: String,
    plan: CascadePlan,
}

impl Bootstrap {
    /// Validates `config` and prepares the stylesheet cascade.
    pub fn new(config: BootConfig) -> Result<Self, BootError> {
        config.validate()?;
        let plan = CascadePlan::new(config.stylesheets)?;

        Ok(Self {
            mount_point: config.mount_point,
            plan,
        })
    }

    /// Always `Phase::Unmounted`; mounting consumes the bootstrap.
    pub fn phase(&self) -> Phase {
        Phase::Unmounted
    }

    /// Id of the element the application will be mounted into.
    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }

    /// Runs the startup sequence.
    ///
    /// The mount point is resolved first. The lookup is a pure read, so a missing
    /// element aborts before the document is touched. Stylesheets are then registered in
    /// cascade order, a render root is created, and the tree built by `tree` is rendered
    /// into it with a single call.
    ///
    /// # Returns
    ///
    /// * `Ok(Mounted)` holding the render root once the render call returned.
    /// * `Err(BootError::MountPointMissing)` if the document has no matching element.
    /// * `Err(BootError::AssetLoad)` if a stylesheet could not be registered.
    /// * `Err(BootError::Render)` if the runtime failed to create the root or render.
    pub fn mount<D, R, F>(
        self,
        document: &mut D,
        runtime: &mut R,
        tree: F,
    ) -> Result<Mounted<R::Root>, BootError>
    where
        D: HostDocument<Node = R::Node>,
        R: RenderRuntime,
        F: FnOnce() -> R::Tree,
    {
        let node = document
            .find_mount_point(&self.mount_point)
            .ok_or_else(|| BootError::MountPointMissing(self.mount_point.clone()))?;
        debug!("Resolved mount point #{}", self.mount_point);

        for sheet in self.plan.iter() {
            document.register_stylesheet(sheet)?;
            debug!("Registered {} stylesheet {}", sheet.layer, sheet.name);
        }

        let mut root = runtime.create_root(node)?;
        runtime.render(&mut root, tree())?;
        info!(
            "Application mounted into #{} with {} stylesheets",
            self.mount_point,
            self.plan.len()
        );

        Ok(Mounted {
            root,
            mount_point: self.mount_point,
            stylesheets: self.plan.len(),
        })
    }
}

/// A mounted application and its render root.
#[derive(Debug)]
pub struct Mounted<Root> {
    root: Root,
    mount_point: String,
    stylesheets: usize,
}

impl<Root> Mounted<Root> {
    /// Always `Phase::Mounted`.
    pub fn phase(&self) -> Phase {
        Phase::Mounted
    }

    /// Id of the element the application was mounted into.
    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }

    /// Number of stylesheets registered before the render.
    pub fn stylesheets(&self) -> usize {
        self.stylesheets
    }

    /// The render root the tree was mounted into.
    pub fn root(&self) -> &Root {
        &self.root
    }

    /// Mutable access to the render root, for later reconciling renders.
    pub fn root_mut(&mut self) -> &mut Root {
        &mut self.root
    }
}
