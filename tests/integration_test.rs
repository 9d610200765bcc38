use cause_list_scraper::models::{builtin_complexes, find_complex, CaseType, ScrapeRequest};
use cause_list_scraper::orchestrator::session_driver;
use cause_list_scraper::workflow::ScrapeCtx;
use cause_list_scraper::{launch_browser, logger, Config};
use chrono::Local;

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_browser_launch() {
    // 初始化日志
    let _ = logger::init("logs");

    // 加载配置
    let config = Config::from_env();

    // 测试浏览器启动与导航
    let result = launch_browser(&config.base_url, true).await;
    assert!(result.is_ok(), "应该能够成功启动浏览器");

    let (mut browser, _page) = result.unwrap();
    browser.close().await.expect("关闭浏览器失败");
}

#[tokio::test]
#[ignore] // 需要真实站点 + 操作员在浏览器里处理验证码
async fn test_single_scrape_end_to_end() {
    // 初始化日志
    let _ = logger::init("logs");

    // 加载配置
    let config = Config::from_env();
    std::fs::create_dir_all(&config.output_dir).expect("创建输出目录失败");

    // 构造请求：默认区域 1 号法庭，今天的民事排期表
    let complexes = builtin_complexes();
    let complex = find_complex(&complexes, &config.default_complex)
        .expect("默认区域不存在")
        .clone();
    let date = Local::now().date_naive();

    let request = ScrapeRequest {
        complex: complex.clone(),
        court_number: "1".to_string(),
        date,
        case_type: CaseType::Civil,
    };
    let ctx = ScrapeCtx::new(
        1,
        1,
        complex.name.clone(),
        "1".to_string(),
        date,
        CaseType::Civil,
    );

    // 执行抓取
    let result = session_driver::run_scrape(&request, &ctx, &config)
        .await
        .expect("会话执行失败");

    assert!(result.is_success(), "抓取应该成功并产出 PDF");
}

#[tokio::test]
#[ignore] // 需要真实站点；请求一个不存在的法庭编号，应失败且不产出 PDF
async fn test_unmatched_court_number_fails() {
    let _ = logger::init("logs");

    let config = Config::from_env();
    std::fs::create_dir_all(&config.output_dir).expect("创建输出目录失败");

    let complexes = builtin_complexes();
    let complex = find_complex(&complexes, &config.default_complex)
        .expect("默认区域不存在")
        .clone();
    let date = Local::now().date_naive();

    let request = ScrapeRequest {
        complex: complex.clone(),
        court_number: "99".to_string(),
        date,
        case_type: CaseType::Civil,
    };
    let ctx = ScrapeCtx::new(
        1,
        1,
        complex.name.clone(),
        "99".to_string(),
        date,
        CaseType::Civil,
    );

    let result = session_driver::run_scrape(&request, &ctx, &config)
        .await
        .expect("会话执行失败");

    assert!(!result.is_success(), "不存在的法庭编号应该报失败");
}
