/// 程序配置
///
/// 所有可调参数集中在这里，支持环境变量覆盖
#[derive(Clone, Debug)]
pub struct Config {
    /// 排期表页面地址
    pub base_url: String,
    /// 默认法院区域名称
    pub default_complex: String,
    /// 法院区域映射文件（可选，TOML 格式，存在时覆盖内置映射）
    pub complexes_file: String,
    /// PDF / 截图输出目录
    pub output_dir: String,
    /// 日志目录
    pub log_dir: String,
    /// 是否无头模式（默认有头，验证码需要人工处理）
    pub headless: bool,
    /// 查找 iframe 中表单的超时（秒）
    pub iframe_wait_secs: u64,
    /// 等待法庭下拉框加载的超时（秒）
    pub dropdown_wait_secs: u64,
    /// 提交后等待结果渲染的时间（秒）
    pub result_settle_secs: u64,
    /// 关闭浏览器前的冷却时间（秒）
    pub browser_cooldown_secs: u64,
    /// 批量模式下两次抓取之间的间隔（秒）
    pub inter_scrape_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://gurugram.dcourts.gov.in/cause-list-%e2%81%84-daily-board/"
                .to_string(),
            default_complex: "District Court, Gurugram".to_string(),
            complexes_file: "complexes.toml".to_string(),
            output_dir: "outputs".to_string(),
            log_dir: "logs".to_string(),
            headless: false,
            iframe_wait_secs: 5,
            dropdown_wait_secs: 15,
            result_settle_secs: 5,
            browser_cooldown_secs: 5,
            inter_scrape_delay_secs: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            base_url: std::env::var("BASE_URL").unwrap_or(default.base_url),
            default_complex: std::env::var("DEFAULT_COMPLEX").unwrap_or(default.default_complex),
            complexes_file: std::env::var("COMPLEXES_FILE").unwrap_or(default.complexes_file),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            log_dir: std::env::var("LOG_DIR").unwrap_or(default.log_dir),
            headless: std::env::var("HEADLESS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.headless),
            iframe_wait_secs: std::env::var("IFRAME_WAIT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.iframe_wait_secs),
            dropdown_wait_secs: std::env::var("DROPDOWN_WAIT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.dropdown_wait_secs),
            result_settle_secs: std::env::var("RESULT_SETTLE_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.result_settle_secs),
            browser_cooldown_secs: std::env::var("BROWSER_COOLDOWN_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.browser_cooldown_secs),
            inter_scrape_delay_secs: std::env::var("INTER_SCRAPE_DELAY_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.inter_scrape_delay_secs),
        }
    }
}
