//! Fire-and-forget notifications from the stores to the view layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores never render anything. They describe what happened as a [`Notice`]
//! and hand it to a [`Notifier`]; the root component wires the notifier to
//! the toast stack. Tests wire it to a [`NoticeLog`] instead.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::sync::{Arc, Mutex};

/// A transient user-facing message emitted by a store or the search client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    FavoriteAdded { name: String },
    FavoriteRemoved { name: String },
    AchievementUnlocked { title: String, description: String },
    SearchCompleted { count: usize },
    SearchEmpty,
    SearchError { message: String },
    TimerFinished,
}

impl Notice {
    /// Short heading shown in bold on the toast.
    pub fn title(&self) -> &'static str {
        match self {
            Self::FavoriteAdded { .. } => "Receta guardada",
            Self::FavoriteRemoved { .. } => "Receta eliminada",
            Self::AchievementUnlocked { .. } => "¡Logro desbloqueado!",
            Self::SearchCompleted { .. } => "Búsqueda completada",
            Self::SearchEmpty => "Sin resultados",
            Self::SearchError { .. } => "Error",
            Self::TimerFinished => "¡Tiempo terminado!",
        }
    }

    /// Body text for the toast.
    pub fn description(&self) -> String {
        match self {
            Self::FavoriteAdded { name } => format!("{name} se ha añadido a tus favoritos"),
            Self::FavoriteRemoved { name } => format!("{name} se ha eliminado de tus favoritos"),
            Self::AchievementUnlocked { title, description } => format!("{title}: {description}"),
            Self::SearchCompleted { count } => format!("Se encontraron {count} recetas"),
            Self::SearchEmpty => "No se encontraron recetas que coincidan con tu búsqueda".to_owned(),
            Self::SearchError { .. } => {
                "Ocurrió un error al buscar las recetas. Por favor, intenta de nuevo.".to_owned()
            }
            Self::TimerFinished => "Es hora de revisar tu preparación".to_owned(),
        }
    }

    /// Whether the toast should use the destructive style.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::SearchError { .. })
    }
}

/// Cloneable handle that delivers notices to whoever is listening.
#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn Fn(Notice) + Send + Sync>,
}

impl Notifier {
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(Notice) + Send + Sync + 'static,
    {
        Self { sink: Arc::new(sink) }
    }

    /// A notifier that drops everything.
    pub fn silent() -> Self {
        Self::new(|_| {})
    }

    pub fn notify(&self, notice: Notice) {
        (self.sink)(notice);
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier").finish_non_exhaustive()
    }
}

/// Shared in-memory record of delivered notices.
#[derive(Clone, Debug, Default)]
pub struct NoticeLog {
    entries: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that appends to this log.
    pub fn notifier(&self) -> Notifier {
        let entries = Arc::clone(&self.entries);
        Notifier::new(move |notice| {
            if let Ok(mut entries) = entries.lock() {
                entries.push(notice);
            }
        })
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<Notice> {
        self.entries.lock().map(|mut e| std::mem::take(&mut *e)).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
