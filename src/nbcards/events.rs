/// Synchronous listener list for the export-complete signal.
#[derive(Default)]
pub struct ExportEvents {
    listeners: Vec<Box<dyn FnMut()>>,
}

impl ExportEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Calls every listener once, in subscription order.
    pub fn fire(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener();
        }
    }
}

impl std::fmt::Debug for ExportEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportEvents")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
