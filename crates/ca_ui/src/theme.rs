pub mod overlay {
    use ca_rendering::Color;

    // Crop rectangle outline
    pub const BORDER_COLOR: Color = Color::RED;
    pub const BORDER_WIDTH: f32 = 5.0;
}

pub mod surface {
    use ca_rendering::Color;

    // Band above the photo
    pub const MARGIN_COLOR: Color = Color::WHITE;
}
