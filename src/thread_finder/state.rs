use crate::types::ThreadId;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::widgets::ListState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadFinderEntry {
    pub id: ThreadId,
    pub title: String,
}

impl ThreadFinderEntry {
    /// Text shown in the list and matched against the query.
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadFinderState {
    pub list_state: ListState,
    pub query: String,
    pub all_threads: Vec<ThreadFinderEntry>,
    pub filtered_threads: Vec<ThreadFinderEntry>,
}

impl ThreadFinderState {
    pub fn set_threads(&mut self, threads: Vec<(ThreadId, String)>) {
        self.all_threads = threads
            .into_iter()
            .map(|(id, title)| ThreadFinderEntry { id, title })
            .collect();
        self.query.clear();
        self.update_filtered_threads();

        // Set initial selection if there are items
        if !self.filtered_threads.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn handle_input(&mut self, c: char) {
        self.query.push(c);
        self.update_filtered_threads();
    }

    pub fn handle_backspace(&mut self) {
        if self.query.pop().is_some() {
            self.update_filtered_threads();
        }
    }

    pub fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i >= self.filtered_threads.len().saturating_sub(1) => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(0) | None => self.filtered_threads.len().saturating_sub(1),
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn highlighted_id(&self) -> Option<ThreadId> {
        self.list_state
            .selected()
            .and_then(|idx| self.filtered_threads.get(idx))
            .map(|entry| entry.id.clone())
    }

    fn update_filtered_threads(&mut self) {
        if self.query.is_empty() {
            self.filtered_threads = self.all_threads.clone();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut matches: Vec<(ThreadFinderEntry, i64)> = self
                .all_threads
                .iter()
                .filter_map(|entry| {
                    matcher
                        .fuzzy_match(&entry.label(), &self.query)
                        .map(|score| (entry.clone(), score))
                })
                .collect();

            // Highest score first; stable sort keeps creation order among ties
            matches.sort_by(|a, b| b.1.cmp(&a.1));
            self.filtered_threads = matches.into_iter().map(|(entry, _)| entry).collect();
        }

        // Adjust selection if necessary
        match self.list_state.selected() {
            Some(selected) if selected >= self.filtered_threads.len() => {
                if self.filtered_threads.is_empty() {
                    self.list_state.select(None);
                } else {
                    self.list_state.select(Some(0));
                }
            }
            None if !self.filtered_threads.is_empty() => self.list_state.select(Some(0)),
            _ => {}
        }
    }
}
