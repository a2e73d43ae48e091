//! Common test helpers for integration tests

use std::fs;
use std::path::Path;

/// Write one sheet file into the dataset directory.
pub fn write_sheet(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(format!("{}.csv", name)), content).unwrap();
}

/// Write a complete, internally consistent dataset: a three-level
/// hierarchy with values, temporal references, scenarios and a legend.
pub fn write_valid_dataset(dir: &Path) {
    write_sheet(
        dir,
        "descricao",
        "codigo,nivel,nome_simples,nome_completo,desc_simples,desc_completa,cenario,legenda\n\
         1,1,Vulnerability,Total vulnerability,Short.,The index root.,,1\n\
         2,2,Exposure,Exposure to hazards,Short.,Exposure dimension.,,1\n\
         3,2,Sensitivity,Sensitivity of systems,Short.,Sensitivity dimension.,,1\n\
         4,3,Rainfall,Annual rainfall,Short.,Rainfall indicator.,,1\n",
    );
    write_sheet(
        dir,
        "composicao",
        "codigo_pai,codigo_filho\n1,2\n1,3\n2,4\n",
    );
    write_sheet(
        dir,
        "valores",
        "id,2-2015,3-2015,4-2015,2-2050-1\n\
         1,0.5,0.25,10.2,0.75\n\
         2,DI,0.5,11.0,0.25\n",
    );
    write_sheet(
        dir,
        "referencia_temporal",
        "nome,descricao,simbolo\n2015,Observed year,2015\n2050,Projection,2050\n",
    );
    write_sheet(
        dir,
        "cenarios",
        "nome,descricao,simbolo\nOptimistic,Low emissions,1\n",
    );
    write_sheet(
        dir,
        "legenda",
        "codigo,etiqueta,cor,minimo,maximo,ordem\n\
         1,Low,#00FF00,0,9.99,1\n\
         1,Medium,#FFFF00,10.0,19.99,2\n\
         1,High,#FF0000,20.0,30.0,3\n\
         1,DI,#CCCCCC,,,4\n",
    );
    write_sheet(
        dir,
        "proporcionalidades",
        "2-2015,\nid,4-2015\n1,1.0\n",
    );
    write_sheet(dir, "dicionario", "palavra\ngeomorfologia\n");
}
