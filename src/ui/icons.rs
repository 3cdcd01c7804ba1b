pub struct Icons;

impl Icons {
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const PACKAGE: &str = "📦";
    pub const PLUGIN: &str = "🔌";
    pub const DATABASE: &str = "🗄️";
    pub const EMPTY: &str = "∅";
}
