//! 门户页面的已知控件 id
//!
//! 排期表查询表单的结构是硬编码约定，站点改版即失效

/// 查询表单
pub const FORM_ID: &str = "frm_causelist";
/// "按法院区域查询"单选框
pub const COMPLEX_RADIO_ID: &str = "chk_complex";
/// 法院区域下拉框
pub const COMPLEX_SELECT_ID: &str = "court_complex_code";
/// 法庭编号下拉框（随区域选择联动加载）
pub const COURT_SELECT_ID: &str = "court_no";
/// 日期输入框（点击后弹出日历控件）
pub const DATE_INPUT_ID: &str = "causelist_date";
/// 民事单选框
pub const CIVIL_RADIO_ID: &str = "chk_civil";
/// 刑事单选框
pub const CRIMINAL_RADIO_ID: &str = "chk_criminal";
/// 查询按钮
pub const SUBMIT_BUTTON_ID: &str = "causelist_search";
