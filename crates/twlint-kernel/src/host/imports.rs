//! Tracking of where the validated function was imported from.

use std::collections::HashSet;

use super::{Callee, ImportDecl};

/// Local names bound to the tracked export of the tracked module.
///
/// ```text
/// import { tw } from "react-strict-dom-tailwind";          // tw(...)
/// import { tw as style } from "react-strict-dom-tailwind"; // style(...)
/// import * as rsd from "react-strict-dom-tailwind";        // rsd.tw(...)
/// ```
#[derive(Debug, Clone)]
pub struct ImportTracker {
    module: String,
    export: String,
    direct: HashSet<String>,
    namespaces: HashSet<String>,
}

impl ImportTracker {
    pub fn new(module: impl Into<String>, export: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            export: export.into(),
            direct: HashSet::new(),
            namespaces: HashSet::new(),
        }
    }

    /// Record one import declaration; other modules are ignored.
    pub fn record(&mut self, decl: &ImportDecl) {
        if decl.module != self.module {
            return;
        }
        for named in &decl.named {
            if named.imported == self.export {
                tracing::debug!("tracking `{}` as {}", named.local, self.export);
                self.direct.insert(named.local.clone());
            }
        }
        if let Some(namespace) = &decl.namespace {
            tracing::debug!("tracking namespace `{namespace}`");
            self.namespaces.insert(namespace.clone());
        }
    }

    /// Does `callee` resolve to the tracked export?
    pub fn is_tracked(&self, callee: &Callee) -> bool {
        match callee {
            Callee::Ident(name) => self.direct.contains(name),
            Callee::Member {
                object: Some(object),
                property,
            } => self.namespaces.contains(object) && *property == self.export,
            Callee::Member { object: None, .. } => false,
        }
    }
}
