mod chart;
mod glaze;
mod photo;
