/// Status glyphs for terminal output
pub struct Icons;

impl Icons {
    pub const PACKAGE: &str = "📦";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const GLOBE: &str = "🌍";
}
