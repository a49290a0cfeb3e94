use tokio::sync::watch;

use crate::error::AppError;
use crate::models::{Modality, SearchStatus};
use crate::query::SearchRequest;
use crate::query::catalog::{GEN_EDS, TERMS};

const STATUS_CHOICES: [SearchStatus; 2] = [SearchStatus::Open, SearchStatus::All];

#[derive(Debug, Clone, PartialEq)]
pub struct HomeUiState {
    pub search_query: String,
    pub selected_term_index: usize,
    pub selected_gen_eds: Vec<String>,
    pub selected_modalities: Vec<Modality>,
    pub selected_status_index: usize,
}

impl Default for HomeUiState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_term_index: 0,
            selected_gen_eds: Vec::new(),
            selected_modalities: vec![
                Modality::AsyncOnline,
                Modality::Hybrid,
                Modality::SyncOnline,
                Modality::InPerson,
            ],
            selected_status_index: 1,
        }
    }
}

impl HomeUiState {
    /// Short label for the GE picker.
    pub fn gen_ed_label(&self) -> String {
        match self.selected_gen_eds.len() {
            0 => String::new(),
            1 => self.selected_gen_eds[0].clone(),
            n if n == GEN_EDS.len() => "All".to_string(),
            _ => "Multi".to_string(),
        }
    }

    /// Short label for the class type picker.
    pub fn modality_label(&self) -> String {
        match self.selected_modalities.len() {
            0 => String::new(),
            1 => self.selected_modalities[0].label().replace(" Online", ""),
            n if n == Modality::ALL.len() => "All".to_string(),
            _ => "Multiple".to_string(),
        }
    }
}

/// Search form state.
pub struct HomeModel {
    state: watch::Sender<HomeUiState>,
}

impl Default for HomeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeModel {
    pub fn new() -> Self {
        let (state, _) = watch::channel(HomeUiState::default());
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<HomeUiState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> HomeUiState {
        self.state.borrow().clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|s| s.search_query = query);
    }

    pub fn select_term(&self, index: usize) -> Result<(), AppError> {
        if index >= TERMS.len() {
            return Err(AppError::BadRequest(format!("no term at index {}", index)));
        }
        self.state.send_modify(|s| s.selected_term_index = index);
        Ok(())
    }

    pub fn select_status(&self, index: usize) -> Result<(), AppError> {
        if index >= STATUS_CHOICES.len() {
            return Err(AppError::BadRequest(format!("no status at index {}", index)));
        }
        self.state.send_modify(|s| s.selected_status_index = index);
        Ok(())
    }

    pub fn toggle_gen_ed(&self, code: &str) -> Result<(), AppError> {
        if !GEN_EDS.contains(&code) {
            return Err(AppError::BadRequest(format!("unknown GE code: {}", code)));
        }
        self.state.send_modify(|s| {
            if let Some(pos) = s.selected_gen_eds.iter().position(|g| g == code) {
                s.selected_gen_eds.remove(pos);
            } else {
                s.selected_gen_eds.push(code.to_string());
            }
        });
        Ok(())
    }

    pub fn toggle_modality(&self, modality: Modality) {
        self.state.send_modify(|s| {
            if let Some(pos) = s.selected_modalities.iter().position(|m| *m == modality) {
                s.selected_modalities.remove(pos);
            } else {
                s.selected_modalities.push(modality);
            }
        });
    }

    /// Parameters for the results screen.
    pub fn search_request(&self) -> SearchRequest {
        let state = self.state.borrow();
        SearchRequest {
            term: TERMS[state.selected_term_index].1,
            query: state.search_query.clone(),
            modalities: state.selected_modalities.clone(),
            gen_eds: state.selected_gen_eds.clone(),
            status: STATUS_CHOICES[state.selected_status_index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_search_everything_in_newest_term() {
        let home = HomeModel::new();
        let req = home.search_request();
        assert_eq!(req.term, 2244);
        assert_eq!(req.status, SearchStatus::All);
        assert_eq!(req.modalities.len(), 4);
        assert!(req.gen_eds.is_empty());
        assert_eq!(home.state().modality_label(), "All");
        assert_eq!(home.state().gen_ed_label(), "");
    }

    #[test]
    fn selections_flow_into_request() {
        let home = HomeModel::new();
        home.set_query("CSE 101");
        home.select_term(3).unwrap();
        home.select_status(0).unwrap();
        home.toggle_gen_ed("IM").unwrap();
        home.toggle_modality(Modality::Hybrid);
        home.toggle_modality(Modality::InPerson);
        home.toggle_modality(Modality::SyncOnline);

        let state = home.state();
        assert_eq!(state.gen_ed_label(), "IM");
        assert_eq!(state.modality_label(), "Async");

        let req = home.search_request();
        assert_eq!(req.term, 2238);
        assert_eq!(req.query, "CSE 101");
        assert_eq!(req.status, SearchStatus::Open);
        assert_eq!(req.gen_eds, vec!["IM".to_string()]);
        assert_eq!(req.modalities, vec![Modality::AsyncOnline]);
    }

    #[test]
    fn toggling_a_ge_twice_removes_it() {
        let home = HomeModel::new();
        home.toggle_gen_ed("CC").unwrap();
        home.toggle_gen_ed("ER").unwrap();
        assert_eq!(home.state().gen_ed_label(), "Multi");
        home.toggle_gen_ed("CC").unwrap();
        assert_eq!(home.state().selected_gen_eds, vec!["ER".to_string()]);
    }

    #[test]
    fn out_of_range_selections_are_rejected() {
        let home = HomeModel::new();
        assert!(home.select_term(TERMS.len()).is_err());
        assert!(home.select_status(2).is_err());
        assert!(home.toggle_gen_ed("XX").is_err());
        assert_eq!(home.state(), HomeUiState::default());
    }
}
