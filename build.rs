use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata for the long --version string
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
