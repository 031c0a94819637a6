// ==========================================
// 客服坐席排班系统 - 测试数据生成器
// ==========================================
// 用途: 生成演示用预测 CSV（单日24小时话务曲线）
// 用法: cargo run --bin generate_test_data [输出文件]
// ==========================================

use anyhow::Result;
use chrono::{Datelike, Local, Weekday};

fn main() -> Result<()> {
    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "test_forecast.csv".to_string());

    let today = Local::now().date_naive();
    let is_weekend = matches!(today.weekday(), Weekday::Sat | Weekday::Sun);

    let mut wtr = csv::Writer::from_path(&out_path)?;
    wtr.write_record(["hour", "required_staff", "is_weekend", "date"])?;

    for hour in 0..24u32 {
        // 双峰话务曲线: 上午10-12点、晚上19-21点话务高峰
        let base = match hour {
            0..=6 => 0.5,
            7..=9 => 3.0 + hour as f64 - 7.0,
            10..=12 => 7.5,
            13..=16 => 5.0,
            17..=18 => 6.0,
            19..=21 => 8.2,
            _ => 2.0,
        };

        wtr.write_record([
            hour.to_string(),
            format!("{:.1}", base),
            if is_weekend { "1" } else { "0" }.to_string(),
            today.format("%Y-%m-%d").to_string(),
        ])?;
    }

    wtr.flush()?;
    println!("测试预测数据已生成: {}", out_path);
    println!("运行示例: cargo run --bin agent-shift-aps -- {}", out_path);

    Ok(())
}
