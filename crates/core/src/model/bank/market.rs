//! Built-in true/false question set for the market instinct quiz.

/// Statement text and whether the statement is true, in bank order.
pub(super) static MARKET_INSTINCT: [(&str, bool); 100] = [
    ("The Forex market is the largest financial market in the world.", true),
    ("A stock represents ownership in a company.", true),
    ("Crypto markets close on weekends.", false),
    ("Indices measure the performance of a group of stocks.", true),
    ("Leverage increases both potential profit and risk.", true),
    ("TradingView is a broker where you can directly hold your money.", false),
    ("A broker guarantees you profits if you follow their signals.", false),
    ("Risk management is more important than finding perfect entries.", true),
    ("A stop loss limits potential losses on a trade.", true),
    ("Market orders guarantee a specific entry price.", false),
    ("Liquidity refers to how easily an asset can be bought or sold.", true),
    ("Bitcoin is controlled by a central bank.", false),
    ("Forex pairs are traded in base/quote format.", true),
    ("A pip is a unit of measurement in Forex trading.", true),
    ("Scalping involves holding trades for weeks.", false),
    ("Swing trading typically lasts days to weeks.", true),
    ("Overtrading can damage trading performance.", true),
    ("Emotions do not affect trading decisions.", false),
    ("Higher timeframe trends are generally stronger than lower timeframe noise.", true),
    ("A margin call happens when your account equity falls too low.", true),
    ("Fundamental analysis focuses on economic data and news.", true),
    ("Technical analysis ignores price charts.", false),
    ("Support levels act as potential price floors.", true),
    ("Resistance levels act as potential price ceilings.", true),
    ("Breakouts always result in strong trends.", false),
    ("Diversification reduces overall portfolio risk.", true),
    ("Cryptocurrency markets are less volatile than Forex.", false),
    ("Lot size determines trade exposure.", true),
    ("Risking 50% of your account per trade is good risk management.", false),
    ("A bullish market means prices are rising.", true),
    ("A bearish market means prices are falling.", true),
    ("Slippage can occur during high volatility.", true),
    ("A demo account uses real money.", false),
    ("Compound growth can significantly increase long-term returns.", true),
    ("Revenge trading often leads to losses.", true),
    ("Indices like the S&P 500 represent multiple companies.", true),
    ("Forex is traded over-the-counter (OTC).", true),
    ("Crypto wallets store actual coins physically inside your device.", false),
    ("High leverage reduces trading risk.", false),
    ("A take profit order locks in gains automatically.", true),
    ("News events can increase market volatility.", true),
    ("Risk-to-reward ratio measures potential profit versus risk.", true),
    ("Trading without a plan improves discipline.", false),
    ("The spread is the difference between bid and ask price.", true),
    ("Broker regulation increases trader protection.", true),
    ("Day trading requires quick decision-making.", true),
    ("Long-term investing ignores market fundamentals.", false),
    ("Stablecoins are designed to reduce volatility.", true),
    ("Inflation can impact currency value.", true),
    ("Volume measures the number of shares or contracts traded.", true),
    ("You can trade Forex 24 hours a day during weekdays.", true),
    ("Fear and greed are major market drivers.", true),
    ("A downtrend consists of lower highs and lower lows.", true),
    ("A trading journal helps improve performance.", true),
    ("Crypto exchanges never get hacked.", false),
    ("Position sizing controls trade risk.", true),
    ("The NASDAQ is a cryptocurrency exchange.", false),
    ("Interest rates influence currency prices.", true),
    ("Backtesting guarantees future profits.", false),
    ("Trendlines help identify market direction.", true),
    ("A sideways market has no clear trend.", true),
    ("Funded accounts eliminate all trading risk.", false),
    ("Stop hunting can occur around key levels.", true),
    ("Risking 1-2% per trade is common risk management practice.", true),
    ("Markets move purely randomly with no structure.", false),
    ("A broker can widen spreads during volatility.", true),
    ("Liquidity is usually higher during major trading session overlaps.", true),
    ("Overleveraging can wipe out an account quickly.", true),
    ("Patience is an important trading skill.", true),
    ("Crypto trading requires a stock exchange account.", false),
    ("Economic calendars help traders prepare for news.", true),
    ("A gap in price usually happens due to strong imbalance.", true),
    ("Trading with no stop loss increases risk exposure.", true),
    ("All brokers manipulate the market.", false),
    ("You must predict every move correctly to be profitable.", false),
    ("Losing trades are part of trading.", true),
    ("The London session impacts Forex volatility.", true),
    ("Correlation means two assets move exactly the same at all times.", false),
    ("A higher win rate always guarantees profitability.", false),
    ("Risk-to-reward ratio can compensate for lower win rate.", true),
    ("Trading is a guaranteed way to become rich quickly.", false),
    ("If you double your lot size after every loss, you eliminate risk.", false),
    ("TradingView provides charting tools and analysis features.", true),
    ("Halal or haram classification of trading depends on structure and intent.", true),
    ("Using 1:1000 leverage automatically makes you a professional trader.", false),
    ("If a YouTuber shows profits, it means it’s risk-free.", false),
    ("A red candle always means the market will crash.", false),
    ("You can blow an account in one bad trade.", true),
    ("Copy trading removes the need to understand risk.", false),
    ("Brokers earn money from spreads or commissions.", true),
    ("Holding a losing trade forever guarantees recovery.", false),
    ("A strong trend can continue longer than expected.", true),
    ("Crypto markets operate 24/7.", true),
    ("The US Dollar impacts many global markets.", true),
    ("Indicators alone guarantee profitable entries.", false),
    ("Trading without emotions is completely humanly possible.", false),
    ("A stop loss can protect capital.", true),
    ("Making 5% monthly consistently is extremely easy.", false),
    ("Risk management is what keeps traders in the game long term.", true),
    ("Blaming the broker for every loss improves performance.", false),
];
