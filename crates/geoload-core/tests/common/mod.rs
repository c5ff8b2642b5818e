pub mod geojson_server;
