mod embed;

pub use embed::{OllamaEmbeddings, BASE_URL_KEY, DIMENSION, MODEL, PROVIDER_NAME, TIMEOUT_KEY};

pub(crate) use embed::spec;
