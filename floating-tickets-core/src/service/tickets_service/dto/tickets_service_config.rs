pub struct TicketsServiceConfig {
    /// upper bound of `limit` accepted by history queries
    pub max_page_size: u32,
}
