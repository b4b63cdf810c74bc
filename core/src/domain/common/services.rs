/// Chat backend the crop doctor talks to.
#[derive(Clone, Debug)]
pub enum ChatBackend<CC> {
    Live(CC),
    Unconfigured,
}

#[derive(Clone, Debug)]
pub struct Service<CC, PC> {
    pub(crate) chat_backend: ChatBackend<CC>,
    pub(crate) prediction_client: PC,
}

impl<CC, PC> Service<CC, PC> {
    pub fn new(chat_backend: ChatBackend<CC>, prediction_client: PC) -> Self {
        Self {
            chat_backend,
            prediction_client,
        }
    }
}
