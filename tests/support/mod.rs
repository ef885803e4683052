pub mod agropredict_env;
pub mod stub_server;
