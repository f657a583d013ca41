//! calc 子命令实现 - 交互式计算器

use crate::calc;
use crate::error::Result;

use super::read_input;

/// 运行计算器交互循环
pub fn execute() -> Result<()> {
    println!("{}", "=".repeat(50));
    println!("       SIMPLE CALCULATOR CLI APPLICATION");
    println!("{}", "=".repeat(50));
    println!("\nAvailable Operations:");
    println!("1. Addition (+)");
    println!("2. Subtraction (-)");
    println!("3. Multiplication (*)");
    println!("4. Division (/)");
    println!("5. Power (^)");
    println!("6. Modulo (%)");
    println!("7. Exit");
    println!("{}", "=".repeat(50));

    loop {
        let Some(choice) = read_input("\nEnter operation number (1-7): ")? else {
            break;
        };

        if choice == "7" {
            println!("\nThank you for using Calculator CLI!");
            println!("Goodbye! 👋");
            break;
        }

        if !matches!(choice.as_str(), "1" | "2" | "3" | "4" | "5" | "6") {
            println!("❌ Invalid choice! Please enter a number between 1-7.");
            continue;
        }

        let Some((a, b)) = read_operands()? else {
            continue;
        };

        // 除法/取模可能失败，其余为全函数
        let (symbol, result) = match choice.as_str() {
            "1" => ("+", Ok(calc::add(a, b))),
            "2" => ("-", Ok(calc::subtract(a, b))),
            "3" => ("×", Ok(calc::multiply(a, b))),
            "4" => ("÷", calc::divide(a, b)),
            "5" => ("^", Ok(calc::power(a, b))),
            _ => ("%", calc::modulo(a, b)),
        };

        match result {
            Ok(value) => println!("\n✅ Result: {} {} {} = {}", a, symbol, b, value),
            Err(e) => println!("❌ Error: {}", e),
        }
    }

    Ok(())
}

/// 读取两个操作数；输入不是数字时报错并返回 None
fn read_operands() -> Result<Option<(f64, f64)>> {
    let Some(first) = read_input("Enter first number: ")? else {
        return Ok(None);
    };
    let Some(second) = read_input("Enter second number: ")? else {
        return Ok(None);
    };

    match (first.parse::<f64>(), second.parse::<f64>()) {
        (Ok(a), Ok(b)) => Ok(Some((a, b))),
        _ => {
            println!("❌ Invalid input! Please enter valid numbers.");
            Ok(None)
        }
    }
}
