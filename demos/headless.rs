use graticule::{
    layers::base::LayerTrait, Axis, GraticuleConfig, GraticuleLayer, RenderContext, TileGeometry,
    Viewport,
};

/// Computes the graticule for a few views without any UI and prints it
fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Graticule Headless Example");
    println!("==========================");

    let config = GraticuleConfig::from_json(r#"{ "latitudes_step": 30, "longitudes_step": 30 }"#)?;
    let mut layer = GraticuleLayer::new("graticule".to_string(), "Graticule".to_string())
        .with_tiles(TileGeometry::default())
        .with_config(config)?;

    let views = [
        ("Whole world", Viewport::new(1024.0, 768.0, 0.5, 0.5, 8.0)),
        ("North Atlantic", Viewport::new(1024.0, 768.0, 0.42, 0.33, 10.0)),
        ("Antimeridian", Viewport::new(1024.0, 768.0, 0.999, 0.5, 11.0)),
        ("Near the pole", Viewport::new(1024.0, 768.0, 0.5, 0.001, 12.0)),
    ];

    for (name, viewport) in views {
        layer.on_zoom_changed(viewport.zoom);
        let graticule = layer.compute(&viewport);

        println!(
            "\n{} (zoom {}, steps {} / {}):",
            name, viewport.zoom, layer.config().latitudes_step, layer.config().longitudes_step
        );
        for axis in [Axis::Latitude, Axis::Longitude] {
            let labels: Vec<&str> = graticule
                .labels_for(axis)
                .map(|label| label.text.as_str())
                .collect();
            println!("   {}: [{}]", axis, labels.join(", "));
        }

        let mut context = RenderContext::new(viewport.width as u32, viewport.height as u32)?;
        layer.render(&mut context, &viewport)?;
        println!("   {} draw commands", context.get_drawing_queue().len());
    }

    println!("\nConfiguration:\n{}", layer.config().to_json()?);
    Ok(())
}
