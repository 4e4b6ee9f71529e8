//! Host object table
//!
//! Components declare the identifiers their configuration introduces,
//! then define them while generating code. Lookups across components go
//! through [`Registry::get_variable`], which suspends until the
//! referenced object has been defined by its owning generation task.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;
use tokio::sync::watch;

use super::expr::{Expr, Ident, ObjectClass};

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no object declared with id '{0}'")]
    NotDeclared(Ident),
    #[error("object '{id}' is a {found}, expected {expected}")]
    ClassMismatch {
        id: Ident,
        found: ObjectClass,
        expected: ObjectClass,
    },
    #[error("object '{0}' is already defined")]
    AlreadyDefined(Ident),
}

struct Slot {
    class: ObjectClass,
    defined: bool,
}

pub struct Registry {
    objects: Mutex<HashMap<Ident, Slot>>,
    // Bumped on every definition so pending lookups re-check the table.
    version: watch::Sender<u64>,
}

impl Registry {
    pub fn new() -> Self {
        let (version, _) = watch::channel(0);
        Registry {
            objects: Mutex::new(HashMap::new()),
            version,
        }
    }

    /// Record that `ident` names an object of `class`.
    ///
    /// Redeclaring with the same class is a no-op; a different class is a
    /// conflict.
    pub fn declare(&self, ident: &Ident, class: ObjectClass) -> Result<(), ResolveError> {
        let mut objects = self.objects.lock().unwrap();
        match objects.get(ident) {
            Some(slot) if slot.class == class => Ok(()),
            Some(slot) => Err(ResolveError::ClassMismatch {
                id: ident.clone(),
                found: slot.class,
                expected: class,
            }),
            None => {
                log::debug!("declared {} '{}'", class, ident);
                objects.insert(ident.clone(), Slot {
                    class,
                    defined: false,
                });
                Ok(())
            }
        }
    }

    /// Mark `ident` as constructed and hand back the expression referring
    /// to it. Declares the identifier on the fly if nothing did before.
    pub fn define(&self, ident: &Ident, class: ObjectClass) -> Result<Expr, ResolveError> {
        {
            let mut objects = self.objects.lock().unwrap();
            let slot = objects.entry(ident.clone()).or_insert(Slot {
                class,
                defined: false,
            });
            if slot.class != class {
                return Err(ResolveError::ClassMismatch {
                    id: ident.clone(),
                    found: slot.class,
                    expected: class,
                });
            }
            if slot.defined {
                return Err(ResolveError::AlreadyDefined(ident.clone()));
            }
            slot.defined = true;
        }
        self.version.send_modify(|v| *v += 1);
        log::debug!("defined {} '{}'", class, ident);
        Ok(Expr::new(ident.clone(), class))
    }

    /// Resolve a declared identifier to its expression.
    ///
    /// Fails right away if the identifier was never declared or carries a
    /// different class; otherwise waits for the owning task to define it.
    pub async fn get_variable(
        &self,
        ident: &Ident,
        class: ObjectClass,
    ) -> Result<Expr, ResolveError> {
        let mut seen = self.version.subscribe();
        loop {
            {
                let objects = self.objects.lock().unwrap();
                match objects.get(ident) {
                    None => return Err(ResolveError::NotDeclared(ident.clone())),
                    Some(slot) if slot.class != class => {
                        return Err(ResolveError::ClassMismatch {
                            id: ident.clone(),
                            found: slot.class,
                            expected: class,
                        });
                    }
                    Some(slot) if slot.defined => return Ok(Expr::new(ident.clone(), class)),
                    Some(_) => {}
                }
            }
            log::debug!("waiting for definition of '{}'", ident);
            // The sender lives as long as the registry, so this cannot fail.
            let _ = seen.changed().await;
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}
