/// Settings for [`OrderSystem`](super::OrderSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of the order actor's request channel.
    pub buffer_size: usize,
    /// Prefix of generated order ids, e.g. `order` gives `order_1`.
    pub id_prefix: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            id_prefix: "order".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn with_id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = id_prefix.into();
        self
    }
}
