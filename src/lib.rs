pub mod config;
pub mod domain {
    pub mod applicant;
    pub mod decision;
}
pub mod error;
pub mod features {
    pub mod grade;
    pub mod normalizer;
    pub mod schema;
}
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod predict;
    }
    pub mod routes;
}
pub mod inference {
    pub mod approval;
    pub mod rate;
}
pub mod models;
pub mod pipeline {
    pub mod engine;
    pub mod policy;
}
pub mod service {
    pub mod decision_service;
}

#[derive(Clone)]
pub struct AppState {
    pub decision_service: service::decision_service::DecisionService,
}
