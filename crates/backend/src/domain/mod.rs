pub mod a001_marca;
pub mod a002_categoria;
pub mod a003_subcategoria;
pub mod a004_producto;
pub mod a005_cliente;
pub mod a006_transportista;
pub mod a007_vehiculo;
pub mod a008_almacen;
pub mod a009_nota_ingreso;
pub mod a010_nota_salida;
pub mod a011_guia_remision;
