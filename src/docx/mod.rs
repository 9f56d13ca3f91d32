pub mod style_sheet;
pub mod docx_adapter;
pub mod article_maker;
pub mod writer;

// 从 style_sheet 导出
pub use style_sheet::{PageSetup, PageTwips, RoleStyle, StyleRole, StyleSheet};

// 从 docx_adapter 导出
pub use docx_adapter::{DocxAdapter, DocxAdapterError, DocxAdapterResult};

// 从 article_maker 导出
pub use article_maker::{
    assemble_article, build_style, formatted_paragraph, metadata_lines, page_number_footer,
    register_styles, styled_run_to_docx,
};

// 从 writer 导出
pub use writer::{output_dir, output_file_name, save_to_dated_dir};
