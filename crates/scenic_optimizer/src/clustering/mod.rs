pub mod geo_distance;
pub mod proximity_clustering;
